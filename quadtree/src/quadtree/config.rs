#[derive(Debug, Clone)]
pub struct Config {
    /// Nodes stop splitting once half their width or height would drop below this.
    pub min_size: (i32, i32),
    /// Outward inflation of the root's nine auxiliary cells. 0 disables them.
    pub worst_case: u32,
    pub collide_rects: bool,
    pub collide_entities: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_size: (32, 32),
            worst_case: 0,
            collide_rects: true,
            collide_entities: false,
        }
    }
}
