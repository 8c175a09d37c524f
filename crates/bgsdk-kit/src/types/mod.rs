//! Core types for bgsdk-kit.
//!
//! Call descriptions and outcomes are the two halves of every exchange; the
//! remaining modules hold the request and response payloads of the typed
//! calls exposed on [`Bgsdk`](crate::Bgsdk).

mod auth;
mod call;
mod environment;
mod market;
mod outcome;
mod token;
mod wallet;

pub use auth::AccessToken;
pub use call::{CallDescription, Domain, Method, ResponseShape, Target};
pub use environment::Environment;
pub use market::{
    CreateOffer, NftRef, OfferResultData, OfferSignature, OfferSignatureData,
    OfferSignatureEnvelope, OfferedNft, SignatureRequest, SubmitSignature,
};
pub use outcome::{Outcome, OutcomeKind};
pub use token::{MintNonFungible, MintResult};
pub use wallet::{Chain, NftList, NftToken, TokenAttribute, Wallet, WalletEnvelope, WalletList};
