// Service module exports

pub mod settings;
