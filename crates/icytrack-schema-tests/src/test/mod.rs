mod export;
mod registry;
