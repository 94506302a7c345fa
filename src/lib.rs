pub mod cli;
pub mod ctx;
pub mod explain;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod tables;
