use tracing::info;

#[derive(Debug, Clone)]
pub struct Stats {
    pub moves: i32,
    pub time_us: usize,
    pub main_expand_nodes: usize,
    pub twin_expand_nodes: usize,
    pub enqueued_nodes: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            moves: -1,
            time_us: 0,
            main_expand_nodes: 0,
            twin_expand_nodes: 0,
            enqueued_nodes: 0,
        }
    }
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Moves {:?} Time(microseconds) {:?} Main expand nodes number: {:?} Twin expand nodes number: {:?} Enqueued nodes number {:?}",
            self.moves, self.time_us, self.main_expand_nodes, self.twin_expand_nodes, self.enqueued_nodes
        );
    }
}
