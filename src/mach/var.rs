use std::collections::HashMap;

/// ## Variable memory
///
/// Every script value is a string; arithmetic reparses them on use.
/// The store is owned by the runtime rather than shared process
/// state, so independent runs cannot observe each other.
#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Option<&str> {
        self.vars.get(var_name).map(|value| value.as_str())
    }

    pub fn store(&mut self, var_name: &str, value: String) {
        self.vars.insert(var_name.to_string(), value);
    }
}
