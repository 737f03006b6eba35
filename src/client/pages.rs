use std::fmt;

/// Page components the client router can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Orders,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Component::Orders => "Orders",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the orders page
pub fn orders() -> Component {
    Component::Orders
}
