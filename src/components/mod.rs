pub mod centrality_table;
pub mod force_graph;
pub mod sidebar;
pub mod tabs;
