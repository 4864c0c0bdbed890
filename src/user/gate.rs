// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, warn};

use crate::config::GateConfig;
use crate::error::Result;
use crate::validation::{check_result, Preconditions};
use crate::validator::Validator;

use super::{UserInput, UserStore};

/// Runs the preconditions and, only when they pass, saves through the store.
pub struct UserGate<S> {
    store: S,
    config: GateConfig,
    preconditions: Preconditions,
}

impl<S: UserStore> UserGate<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, GateConfig::default())
    }

    pub fn with_config(store: S, config: GateConfig) -> Self {
        Self {
            store,
            config,
            preconditions: Preconditions::default(),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates `input`, saves it and, if configured, validates the save outcome.
    ///
    /// The store is never called when a precondition fails.
    pub fn create(&self, input: UserInput<'_>) -> Result<S::Outcome> {
        let user = self.preconditions.validate(&input).map_err(|err| {
            warn!("rejected new user: {err}");
            err
        })?;

        debug!("saving user {:?}", user.name);
        let outcome = self.store.save(&user);

        if self.config.check_result {
            let required = self.config.required_result_keys.as_slice();
            if let Err(err) = check_result(&outcome, required) {
                warn!("store returned a malformed result for {:?}: {err}", user.name);
                return Err(err);
            }
        }
        Ok(outcome)
    }
}

/// One-shot creation with the default configuration: boolean acknowledgement, no result check.
pub fn create_user<S: UserStore>(store: &S, input: UserInput<'_>) -> Result<S::Outcome> {
    UserGate::new(store).create(input)
}
