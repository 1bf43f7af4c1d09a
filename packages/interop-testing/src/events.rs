//! Helpers for inspecting `AppResponse` events.
//!
//! Custom events emitted by a contract surface as `wasm-<type>`.

use cw_multi_test::AppResponse;

fn wasm_type(ty: &str) -> String {
    format!("wasm-{}", ty)
}

/// Value of `key` on the first `ty` event.
pub fn attribute(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    let ty = wasm_type(ty);
    res.events
        .iter()
        .filter(|event| event.ty == ty)
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

/// Position of the first `ty` event, optionally carrying `key = value`.
pub fn position(res: &AppResponse, ty: &str, with: Option<(&str, &str)>) -> Option<usize> {
    let ty = wasm_type(ty);
    res.events.iter().position(|event| {
        event.ty == ty
            && with.map_or(true, |(key, value)| {
                event
                    .attributes
                    .iter()
                    .any(|attr| attr.key == key && attr.value == value)
            })
    })
}

pub fn has_event(res: &AppResponse, ty: &str) -> bool {
    position(res, ty, None).is_some()
}
