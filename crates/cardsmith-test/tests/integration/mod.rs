mod builder;
mod emit;
mod helpers;
