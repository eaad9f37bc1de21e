use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage::{read_owner, write_owner};

/// Capability for owner-gated configuration. Sensitive mutators load it
/// and call [`AccessOwner::require`] before touching anything.
pub struct AccessOwner {
    owner: Address,
}

impl AccessOwner {
    /// Records `owner` as the privileged identity. Called once from `initialize`.
    pub fn install(env: &Env, owner: &Address) -> Self {
        write_owner(env, owner);
        AccessOwner {
            owner: owner.clone(),
        }
    }

    pub fn load(env: &Env) -> Result<Self, Error> {
        Ok(AccessOwner {
            owner: read_owner(env)?,
        })
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn require(&self, caller: &Address) -> Result<(), Error> {
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    /// Hands the capability to `new_owner`. Caller must be the current owner.
    pub fn transfer(self, env: &Env, caller: &Address, new_owner: &Address) -> Result<Self, Error> {
        self.require(caller)?;
        Ok(Self::install(env, new_owner))
    }
}
