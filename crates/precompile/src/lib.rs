//! # zkp256-precompile
//!
//! P256 (secp256r1) signature verification exposed as a precompiled contract.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod interface;
pub mod secp256r1;
pub mod utilities;

pub use interface::*;
pub use primitives;

use once_cell::race::OnceBox;
use primitives::Address;
use std::{boxed::Box, collections::BTreeMap, vec::Vec};

/// Set of precompiles keyed by the address they are served from.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    /// Precompiles
    inner: BTreeMap<Address, PrecompileFn>,
}

impl Precompiles {
    /// Returns the precompiles served by a P256-enabled host.
    pub fn latest() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Precompiles::default();
            precompiles.extend(secp256r1::precompiles());
            Box::new(precompiles)
        })
    }

    /// Returns an iterator over the precompiles addresses.
    #[inline]
    pub fn addresses(&self) -> impl ExactSizeIterator<Item = &Address> {
        self.inner.keys()
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.inner.contains_key(address)
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<&PrecompileFn> {
        self.inner.get(address)
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles with overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = PrecompileWithAddress>) {
        let items: Vec<PrecompileWithAddress> = other.into_iter().collect::<Vec<_>>();
        self.inner.extend(items.into_iter().map(|p| (p.0, p.1)));
    }

    /// Runs the precompile at `address`, or returns `None` if nothing is served there.
    pub fn call(
        &self,
        address: &Address,
        input: &[u8],
        gas_limit: u64,
        crypto: &dyn Crypto,
    ) -> Option<PrecompileResult> {
        self.get(address)
            .map(|precompile| precompile(input, gas_limit, crypto))
    }
}

/// Precompile function paired with its address.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub PrecompileFn);

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address).
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
