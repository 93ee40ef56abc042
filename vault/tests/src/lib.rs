#[cfg(test)]
mod mock;

#[cfg(test)]
mod utils;

#[cfg(test)]
mod actions;

#[cfg(test)]
mod apy;

#[cfg(test)]
mod state;

#[cfg(test)]
mod vesting;
