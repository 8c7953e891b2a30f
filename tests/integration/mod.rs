/// Integration test entry point
mod dashboard_flow;
