use soroban_sdk::{contracttype, Bytes, BytesN, Env, IntoVal, Val};

/// Maps secret material to the 32-byte commitment a deposit is keyed by.
///
/// A depositor contract is linked against exactly one scheme, so the shape of the
/// secret accepted by `withdraw` is fixed for the lifetime of the instance.
pub trait CommitmentScheme {
    /// Secret revealed on withdrawal. Published in the `withdrawn` event.
    type Secret: Clone + IntoVal<Env, Val>;

    /// Deterministic and side-effect free.
    fn commit(env: &Env, secret: &Self::Secret) -> BytesN<32>;
}

/// Secret is a single 32-byte value hashed as-is.
pub struct SingleValue;

impl CommitmentScheme for SingleValue {
    type Secret = BytesN<32>;

    fn commit(env: &Env, secret: &BytesN<32>) -> BytesN<32> {
        let secret_bytes = Bytes::from_array(env, &secret.to_array());
        env.crypto().keccak256(&secret_bytes).into()
    }
}

/// Secret split into four 64-bit limbs, `limb0` being the least significant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretLimbs {
    pub limb0: u64,
    pub limb1: u64,
    pub limb2: u64,
    pub limb3: u64,
}

impl SecretLimbs {
    pub fn new(limb0: u64, limb1: u64, limb2: u64, limb3: u64) -> Self {
        Self { limb0, limb1, limb2, limb3 }
    }

    /// Recombine the limbs into one big-endian 256-bit value, `limb3` in the top bytes.
    pub fn to_array(&self) -> [u8; 32] {
        let mut packed = [0u8; 32];
        packed[0..8].copy_from_slice(&self.limb3.to_be_bytes());
        packed[8..16].copy_from_slice(&self.limb2.to_be_bytes());
        packed[16..24].copy_from_slice(&self.limb1.to_be_bytes());
        packed[24..32].copy_from_slice(&self.limb0.to_be_bytes());
        packed
    }
}

/// Secret given as four limbs, recombined before hashing.
pub struct FourLimbs;

impl CommitmentScheme for FourLimbs {
    type Secret = SecretLimbs;

    fn commit(env: &Env, secret: &SecretLimbs) -> BytesN<32> {
        let packed = Bytes::from_array(env, &secret.to_array());
        env.crypto().keccak256(&packed).into()
    }
}
