/// Unit test entry point
mod core_stats;
