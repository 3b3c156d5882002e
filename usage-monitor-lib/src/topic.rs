use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, marker::PhantomData};

pub trait Encode {
    type EncodeError;

    fn encode(message: &Self) -> Result<Bytes, Self::EncodeError>;
}

pub trait Decode {
    type Output;
    type DecodeError;

    fn decode<T: AsRef<[u8]>>(payload: T) -> Result<Self::Output, Self::DecodeError>;
}

/// MQTT topic bound to the message type carried on it
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Topic<M>(&'static str, PhantomData<M>);

impl<M> Topic<M>
where
    M: Encode + Decode,
{
    pub const fn new(topic: &'static str) -> Self {
        Self(topic, PhantomData {})
    }

    pub fn encode(&self, message: &M) -> Result<Bytes, M::EncodeError> {
        M::encode(message)
    }

    pub fn decode<T>(&self, payload: T) -> Result<M::Output, M::DecodeError>
    where
        T: AsRef<[u8]>,
    {
        M::decode(payload)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }

    /// True when an incoming publish was sent on this topic
    pub fn matches(&self, topic: &str) -> bool {
        self.0 == topic
    }
}

impl<T> Encode for T
where
    T: Serialize,
{
    type EncodeError = serde_json::Error;

    fn encode(message: &Self) -> Result<Bytes, Self::EncodeError> {
        serde_json::to_vec(message).map(Bytes::from)
    }
}

impl<M> Decode for M
where
    M: DeserializeOwned,
{
    type Output = Self;
    type DecodeError = serde_json::Error;

    fn decode<T: AsRef<[u8]>>(payload: T) -> Result<Self::Output, Self::DecodeError> {
        serde_json::from_slice(payload.as_ref())
    }
}

impl<T> fmt::Display for Topic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
