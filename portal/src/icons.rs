// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Icon names the admin UI offers for sections and systems. Stored icon strings are
//! free-form; anything outside this catalog renders as [`DEFAULT_ICON`].

use serde::Serialize;

pub const DEFAULT_ICON: &str = "HelpCircle";

pub const ICON_CATALOG: [&str; 107] = [
    "LayoutDashboard",
    "Home",
    "Settings",
    "Users",
    "User",
    "Briefcase",
    "Building",
    "CreditCard",
    "FileText",
    "BarChart3",
    "PieChart",
    "TrendingUp",
    "ShoppingCart",
    "Server",
    "Database",
    "Cloud",
    "CloudCog",
    "Terminal",
    "Shield",
    "ShieldCheck",
    "Lock",
    "Key",
    "Monitor",
    "Laptop",
    "Smartphone",
    "Mail",
    "MessageSquare",
    "Calendar",
    "Clock",
    "MapPin",
    "Link",
    "ExternalLink",
    "Star",
    "Heart",
    "Bell",
    "Search",
    "Menu",
    "Check",
    "Plus",
    "Trash2",
    "Edit2",
    "Save",
    "LogOut",
    "Activity",
    "AlertCircle",
    "Archive",
    "Award",
    "Bookmark",
    "Box",
    "Camera",
    "CheckCircle",
    "Clipboard",
    "Code",
    "Coffee",
    "Compass",
    "Copy",
    "Download",
    "Eye",
    "File",
    "Filter",
    "Flag",
    "Folder",
    "Gift",
    "Globe",
    "Grid",
    "HelpCircle",
    "Image",
    "Inbox",
    "Info",
    "Layers",
    "Layout",
    "LifeBuoy",
    "List",
    "Loader",
    "LockOpen",
    "Map",
    "Maximize",
    "Mic",
    "Music",
    "Navigation",
    "Paperclip",
    "Phone",
    "Play",
    "Power",
    "Printer",
    "Radio",
    "RefreshCw",
    "Send",
    "Share2",
    "Sidebar",
    "Sliders",
    "Speaker",
    "StopCircle",
    "Sun",
    "Moon",
    "Table",
    "Tag",
    "Target",
    "ThumbsUp",
    "Tool",
    "Truck",
    "Type",
    "Umbrella",
    "Upload",
    "Video",
    "Wifi",
    "Zap",
];

pub fn is_known(name: &str) -> bool {
    ICON_CATALOG.contains(&name)
}

#[derive(Debug, Serialize)]
pub struct IconCatalog {
    pub default: &'static str,
    pub icons: &'static [&'static str],
}

pub fn catalog() -> IconCatalog {
    IconCatalog {
        default: DEFAULT_ICON,
        icons: &ICON_CATALOG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_known("Server"));
        assert!(!is_known("server"));
        assert!(!is_known(""));
    }

    #[test]
    fn catalog_has_no_duplicates_and_includes_default() {
        let mut names = ICON_CATALOG.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ICON_CATALOG.len());
        assert!(is_known(DEFAULT_ICON));
    }
}
