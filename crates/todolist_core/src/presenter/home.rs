//! Home screen navigation routes.
//!
//! The promotional image on the home screen is fetched by the host; it has
//! no state in core.

/// Forward navigation actions offered by the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeRoute {
    /// Open the to-do list.
    ToDoList,
    /// Open the list from the "completed" entry point.
    Completed,
}

impl HomeRoute {
    pub const ALL: [HomeRoute; 2] = [HomeRoute::ToDoList, HomeRoute::Completed];

    /// Transition identifier the host uses to perform navigation.
    pub fn segue_identifier(self) -> &'static str {
        match self {
            Self::ToDoList => "ToDoList",
            Self::Completed => "Completed!",
        }
    }

    pub fn from_segue_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.segue_identifier() == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::HomeRoute;

    #[test]
    fn segue_identifiers_resolve_both_ways() {
        for route in HomeRoute::ALL {
            assert_eq!(
                HomeRoute::from_segue_identifier(route.segue_identifier()),
                Some(route)
            );
        }
        assert_eq!(HomeRoute::Completed.segue_identifier(), "Completed!");
        assert_eq!(HomeRoute::from_segue_identifier("todolist"), None);
    }
}
