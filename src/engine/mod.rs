//! Engine sub-modules: repayment math and bank offers.

pub mod banks;
pub mod mortgage;
