use crate::caps::CapId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SelectCap(CapId),
    Download,
    Clear,
    ToggleMenu,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "1" => Some(KeyAction::SelectCap(CapId::Skinny)),
        "2" => Some(KeyAction::SelectCap(CapId::Medium)),
        "3" => Some(KeyAction::SelectCap(CapId::Fat)),
        "s" | "S" => Some(KeyAction::Download),
        "c" | "C" => Some(KeyAction::Clear),
        "m" | "M" => Some(KeyAction::ToggleMenu),
        _ => None,
    }
}

/// Initial cap from a `location.search` string such as `?cap=fat`.
pub fn cap_from_query(search: &str) -> Option<CapId> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "cap")
        .and_then(|(_, value)| CapId::parse(value))
}
