use std::{fmt, str::FromStr};

use crate::{
    contract::{AssetStore, Context},
    error::ContractError,
    storage::api::StateStore,
    util::canonical::to_canonical_vec,
};

/// Functions a host may invoke by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Exists,
    Create,
    Read,
    Update,
    Delete,
}

impl Function {
    pub const ALL: [Function; 5] =
        [Function::Exists, Function::Create, Function::Read, Function::Update, Function::Delete];

    pub fn name(self) -> &'static str {
        match self {
            Function::Exists => "exists",
            Function::Create => "create",
            Function::Read => "read",
            Function::Update => "update",
            Function::Delete => "delete",
        }
    }

    /// Number of positional string arguments, id first.
    pub fn arity(self) -> usize {
        match self {
            Function::Exists | Function::Read | Function::Delete => 1,
            Function::Create | Function::Update => 2,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ContractError::UnknownFunction(s.to_string()))
    }
}

impl AssetStore {
    /// Runs one named function and renders its result as a response payload.
    ///
    /// `exists` yields `true`/`false`, `read` yields the asset JSON, writes yield
    /// an empty payload.
    pub fn invoke<S, A>(
        &self,
        ctx: &Context<'_, S>,
        function: &str,
        args: &[A],
    ) -> Result<Vec<u8>, ContractError>
    where
        S: StateStore + ?Sized,
        A: AsRef<str>,
    {
        let function: Function = function.parse()?;
        if args.len() != function.arity() {
            return Err(ContractError::InvalidArguments {
                function: function.name(),
                expected: function.arity(),
                got: args.len(),
            });
        }
        let arg = |i: usize| args[i].as_ref();

        let _span = tracing::debug_span!("invoke", %function, id = arg(0)).entered();
        match function {
            Function::Exists => {
                let exists = self.exists(ctx, arg(0))?;
                to_canonical_vec(&exists).map_err(ContractError::Encode)
            }
            Function::Create => {
                self.create(ctx, arg(0), arg(1))?;
                Ok(Vec::new())
            }
            Function::Read => self.read(ctx, arg(0))?.encode(),
            Function::Update => {
                self.update(ctx, arg(0), arg(1))?;
                Ok(Vec::new())
            }
            Function::Delete => {
                self.delete(ctx, arg(0))?;
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn parses_every_name() {
        for f in Function::ALL {
            assert_eq!(f.name().parse::<Function>().unwrap(), f);
        }
        assert!(matches!(
            "transfer".parse::<Function>(),
            Err(ContractError::UnknownFunction(name)) if name == "transfer"
        ));
    }

    #[test]
    fn invoke_walks_the_lifecycle() {
        let store = MemoryStore::new();
        let ctx = Context::new(&store);
        let contract = AssetStore::new();

        assert_eq!(contract.invoke(&ctx, "exists", &["1001"]).unwrap(), b"false");
        assert!(contract.invoke(&ctx, "create", &["1001", "value-A"]).unwrap().is_empty());
        assert_eq!(contract.invoke(&ctx, "exists", &["1001"]).unwrap(), b"true");
        assert_eq!(contract.invoke(&ctx, "read", &["1001"]).unwrap(), br#"{"value":"value-A"}"#);
        contract.invoke(&ctx, "update", &["1001", "value-B"]).unwrap();
        assert_eq!(contract.invoke(&ctx, "read", &["1001"]).unwrap(), br#"{"value":"value-B"}"#);
        contract.invoke(&ctx, "delete", &["1001"]).unwrap();
        assert_eq!(contract.invoke(&ctx, "exists", &["1001"]).unwrap(), b"false");
    }

    #[test]
    fn invoke_checks_arity_before_touching_state() {
        let store = MemoryStore::new();
        let ctx = Context::new(&store);
        let contract = AssetStore::new();

        let err = contract.invoke(&ctx, "create", &["1001"]).unwrap_err();
        assert!(matches!(
            err,
            ContractError::InvalidArguments { function: "create", expected: 2, got: 1 }
        ));
        assert_eq!(err.to_string(), "create expects 2 argument(s), got 1");

        let no_args: [&str; 0] = [];
        assert!(matches!(
            contract.invoke(&ctx, "read", &no_args),
            Err(ContractError::InvalidArguments { got: 0, .. })
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn invoke_accepts_owned_args() {
        let store = MemoryStore::new();
        let ctx = Context::new(&store);
        let args = vec!["1002".to_string(), "X".to_string()];
        AssetStore::new().invoke(&ctx, "create", &args).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }
}
