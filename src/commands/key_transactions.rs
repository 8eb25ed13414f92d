//! Key transaction commands

use crate::cli::command::Command;
use crate::cli::context::CliContext;
use crate::cli::options::{OptionKey, RegisteredOption};
use crate::cli::parser::ParsedArgs;
use crate::errors::AppResult;
use tracing::{error, info};

pub struct GetKeyTransactions;

impl Command for GetKeyTransactions {
    fn name(&self) -> &'static str {
        "get_key_transactions"
    }

    fn description(&self) -> &'static str {
        "List key transactions, optionally filtered by name"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Name.optional().describe("Only list key transactions with this name")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let transactions = ctx
            .api()?
            .key_transactions()
            .list(args.value(OptionKey::Name))?;
        info!(count = transactions.len(), "listed key transactions");
        for transaction in &transactions {
            info!(id = transaction.id, name = %transaction.name, "key transaction");
        }
        Ok(())
    }
}

pub struct GetKeyTransaction;

impl Command for GetKeyTransaction {
    fn name(&self) -> &'static str {
        "get_key_transaction"
    }

    fn description(&self) -> &'static str {
        "Show a single key transaction"
    }

    fn options(&self) -> Vec<RegisteredOption> {
        vec![OptionKey::Id.required().describe("Id of the key transaction")]
    }

    fn execute(&self, args: &ParsedArgs, ctx: &CliContext) -> AppResult<()> {
        let id = args.u64(OptionKey::Id)?;
        match ctx.api()?.key_transactions().show(id)? {
            Some(transaction) => info!(
                id = transaction.id,
                name = %transaction.name,
                transaction_name = transaction.transaction_name.as_deref().unwrap_or("-"),
                "key transaction"
            ),
            None => error!(id, "key transaction not found"),
        }
        Ok(())
    }
}
