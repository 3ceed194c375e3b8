// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::password::{PasswordError, hash_password, verify_password};
use crate::store::{ContentStore, StoreError};
use log::warn;
use serde::Serialize;
use std::fmt;

/// What a successful login reveals about the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub username: String,
}

#[derive(Debug)]
pub enum CredentialError {
    Store(StoreError),
    Password(PasswordError),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Store(err) => write!(f, "{}", err),
            CredentialError::Password(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CredentialError {}

impl From<StoreError> for CredentialError {
    fn from(err: StoreError) -> Self {
        CredentialError::Store(err)
    }
}

impl From<PasswordError> for CredentialError {
    fn from(err: PasswordError) -> Self {
        CredentialError::Password(err)
    }
}

/// Checks admin credentials against the salted hashes in the Content Store.
pub struct AdminCredentials {
    dummy_stored_hash: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials").finish_non_exhaustive()
    }
}

impl AdminCredentials {
    pub fn new() -> Result<Self, PasswordError> {
        Ok(Self {
            dummy_stored_hash: hash_password("dummy-password")?,
        })
    }

    /// Unknown usernames are verified against a dummy hash so both failures cost the same.
    pub fn verify(
        &self,
        store: &ContentStore,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminIdentity>, CredentialError> {
        let admin = store.find_admin(username)?;
        let stored_hash = admin
            .as_ref()
            .map(|admin| admin.password_hash.as_str())
            .unwrap_or(self.dummy_stored_hash.as_str());

        let valid = verify_password(password, stored_hash)?;
        match admin {
            Some(admin) if valid => Ok(Some(AdminIdentity {
                id: admin.id,
                username: admin.username,
            })),
            _ => {
                warn!("Failed admin login attempt");
                Ok(None)
            }
        }
    }
}
