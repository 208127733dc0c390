use fuzzy_core::{LinguisticVariable, Rule};
use game_core::controller::table::{self, FuzzyParams};
use serde::Serialize;

/// Snapshot of the paddle controller's fuzzy configuration
#[derive(Debug, Serialize)]
pub struct FuzzyView<'a> {
    pub version: u32,
    pub params: FuzzyParams,
    pub antecedents: &'a [LinguisticVariable],
    pub consequent: &'a LinguisticVariable,
    pub rules: &'a [Rule],
}

pub fn render(params: &FuzzyParams) -> anyhow::Result<String> {
    let engine = table::build_engine(params)?;
    let view = FuzzyView {
        version: table::FUZZY_TABLE_VERSION,
        params: *params,
        antecedents: engine.antecedents(),
        consequent: engine.consequent(),
        rules: engine.rules(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
