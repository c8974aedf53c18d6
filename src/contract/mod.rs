pub mod asset;
pub mod context;
pub mod dispatch;


use crate::{error::ContractError, storage::api::StateStore};

pub use asset::Asset;
pub use context::Context;
pub use dispatch::Function;

/// Existence-guarded create/read/update/delete over a [`StateStore`].
///
/// Holds no state of its own: every call performs one existence check and at
/// most one further backend call through the supplied [`Context`]. The check and
/// the write are separate backend calls, isolation between them is the backend's job.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetStore;

impl AssetStore {
    /// Name a host registers this contract under.
    pub const NAME: &'static str = "AssetStore";

    pub fn new() -> Self {
        AssetStore
    }

    /// An id exists iff a non-empty value is stored under it.
    pub fn exists<S>(&self, ctx: &Context<'_, S>, id: &str) -> Result<bool, ContractError>
    where
        S: StateStore + ?Sized,
    {
        let bytes = ctx.stub().get_state(id)?;
        Ok(!bytes.is_empty())
    }

    pub fn create<S>(
        &self,
        ctx: &Context<'_, S>,
        id: &str,
        value: &str,
    ) -> Result<(), ContractError>
    where
        S: StateStore + ?Sized,
    {
        if self.exists(ctx, id)? {
            tracing::warn!(%id, "create rejected, asset already exists");
            return Err(ContractError::AlreadyExists(id.to_string()));
        }
        let bytes = Asset::new(value).encode()?;
        ctx.stub().put_state(id, &bytes)?;
        tracing::debug!(%id, len = bytes.len(), "asset created");
        Ok(())
    }

    pub fn read<S>(&self, ctx: &Context<'_, S>, id: &str) -> Result<Asset, ContractError>
    where
        S: StateStore + ?Sized,
    {
        if !self.exists(ctx, id)? {
            tracing::warn!(%id, "read rejected, asset does not exist");
            return Err(ContractError::NotFound(id.to_string()));
        }
        let bytes = ctx.stub().get_state(id)?;
        let asset = Asset::decode(&bytes)?;
        tracing::debug!(%id, "asset read");
        Ok(asset)
    }

    /// Replaces the stored asset wholesale; nothing from the previous value is kept.
    pub fn update<S>(
        &self,
        ctx: &Context<'_, S>,
        id: &str,
        new_value: &str,
    ) -> Result<(), ContractError>
    where
        S: StateStore + ?Sized,
    {
        if !self.exists(ctx, id)? {
            tracing::warn!(%id, "update rejected, asset does not exist");
            return Err(ContractError::NotFound(id.to_string()));
        }
        let bytes = Asset::new(new_value).encode()?;
        ctx.stub().put_state(id, &bytes)?;
        tracing::debug!(%id, len = bytes.len(), "asset updated");
        Ok(())
    }

    pub fn delete<S>(&self, ctx: &Context<'_, S>, id: &str) -> Result<(), ContractError>
    where
        S: StateStore + ?Sized,
    {
        if !self.exists(ctx, id)? {
            tracing::warn!(%id, "delete rejected, asset does not exist");
            return Err(ContractError::NotFound(id.to_string()));
        }
        ctx.stub().delete_state(id)?;
        tracing::debug!(%id, "asset deleted");
        Ok(())
    }
}
