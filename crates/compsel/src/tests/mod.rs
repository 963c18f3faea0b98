//! Unit and behavioural tests for the `compsel` facade.

mod behaviour;
