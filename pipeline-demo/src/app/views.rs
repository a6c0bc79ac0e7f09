//! Switching between the dashboard's views

use super::App;

/// Page shown in the body of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Pipeline,
    Analytics,
    Distribution,
}

impl View {
    pub const ALL: [View; 3] = [View::Pipeline, View::Analytics, View::Distribution];

    pub fn title(self) -> &'static str {
        match self {
            View::Pipeline => "Pipeline",
            View::Analytics => "Analytics",
            View::Distribution => "Distribution",
        }
    }

    fn position(self) -> usize {
        self as usize
    }

    /// View bound to number key `c`, counting from '1'
    pub fn from_digit(c: char) -> Option<View> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| View::ALL.get(i).copied())
    }
}

impl App {
    pub fn next_view(&mut self) {
        self.view = View::ALL[(self.view.position() + 1) % View::ALL.len()];
    }

    pub fn previous_view(&mut self) {
        let i = self.view.position();
        self.view = if i == 0 {
            View::ALL[View::ALL.len() - 1]
        } else {
            View::ALL[i - 1]
        };
    }
}
