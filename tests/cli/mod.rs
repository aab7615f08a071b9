pub mod support;

mod graph_files;
mod path;
mod round_trip;
mod show;
mod unvisited;
