//! JavaScript bindings.
//!
//! Items are passed as an array of `{ name, cost, value }` objects.

use crate::catalog::{Catalog, Item};
use crate::compare::Comparison;
use crate::exact::ExactSelector;
use crate::greedy::GreedySelector;
use crate::selector::Selector;
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn catalog_from_js(items: JsValue) -> Result<Catalog, JsValue> {
    let items: Vec<Item> = serde_wasm_bindgen::from_value(items)?;
    Catalog::new(items).map_err(to_js_error)
}

/// Greedy selection. Returns `{ total_value, spent, chosen }`.
#[wasm_bindgen(js_name = selectGreedy)]
pub fn select_greedy(items: JsValue, budget: i64) -> Result<JsValue, JsValue> {
    let catalog = catalog_from_js(items)?;
    let solution = GreedySelector.select(&catalog, budget).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&solution)?)
}

/// Optimal selection. Returns `{ total_value, spent, chosen }`.
#[wasm_bindgen(js_name = selectExact)]
pub fn select_exact(items: JsValue, budget: i64) -> Result<JsValue, JsValue> {
    let catalog = catalog_from_js(items)?;
    let solution = ExactSelector::default()
        .select(&catalog, budget)
        .map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&solution)?)
}

/// Runs both selectors. Returns `{ budget, greedy, exact }`.
#[wasm_bindgen(js_name = compareSelectors)]
pub fn compare_selectors(items: JsValue, budget: i64) -> Result<JsValue, JsValue> {
    let catalog = catalog_from_js(items)?;
    let cmp = Comparison::run(&catalog, budget, &ExactSelector::default()).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&cmp)?)
}
