// Application layer: input collection, interactive prompts and report output.

pub mod handler;
pub mod input;
pub mod printer;
pub mod prompter;
