/// Solver settings.
///
/// The search space grows exponentially with the number of boxes and there's no timeout,
/// `max_visited` is the way to bound how much work a single solve does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Give up with `SolverErr::StateLimit` after expanding this many unique states
    pub max_visited: Option<usize>,
    /// Print stats to stdout every time the search reaches a new depth
    pub print_status: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_visited(mut self, max_visited: usize) -> Self {
        self.max_visited = Some(max_visited);
        self
    }

    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }
}
