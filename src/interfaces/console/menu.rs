/// Who is at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Staff,
}

impl Role {
    /// Accepts `customer` or `staff`, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }
}

/// A numbered menu. Option `n` on screen is `OPTIONS[n - 1]`.
pub trait Menu: Copy + 'static {
    const TITLE: &'static str;
    const OPTIONS: &'static [(Self, &'static str)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    JoinQueue,
    SwitchToStaff,
    Exit,
}

impl Menu for CustomerAction {
    const TITLE: &'static str = "--- Customer Mode ---";
    const OPTIONS: &'static [(Self, &'static str)] = &[
        (CustomerAction::JoinQueue, "Add customer to queue"),
        (CustomerAction::SwitchToStaff, "Switch to Bank Staff Mode"),
        (CustomerAction::Exit, "Exit"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffAction {
    Serve,
    Display,
    SwitchToCustomer,
    Exit,
}

impl Menu for StaffAction {
    const TITLE: &'static str = "--- Bank Staff Mode ---";
    const OPTIONS: &'static [(Self, &'static str)] = &[
        (StaffAction::Serve, "Serve customer"),
        (StaffAction::Display, "Display queue"),
        (StaffAction::SwitchToCustomer, "Switch to Customer Mode"),
        (StaffAction::Exit, "Exit"),
    ];
}
