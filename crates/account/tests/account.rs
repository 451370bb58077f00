//! Account validation against freshly generated P256 key pairs.
use p256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use zkp256_account::{
    primitives::{
        address, bytes, FixedBytes, TransactionRequest, ACCOUNT_VALIDATION_SUCCESS_MAGIC, B256,
        EIP1271_MAGIC_VALUE, EIP712_TX_TYPE, P256_GROUP_ORDER, U256,
    },
    AccountError, P256Account, P256Error, P256Signature,
};

struct Wallet {
    key: SigningKey,
    account: P256Account,
}

impl Wallet {
    fn random(rng: &mut StdRng) -> Self {
        let key = loop {
            if let Ok(key) = SigningKey::from_slice(&rng.random::<[u8; 32]>()) {
                break key;
            }
        };
        let point = key.verifying_key().to_encoded_point(false);
        let account = P256Account::new(
            B256::from_slice(point.x().unwrap()),
            B256::from_slice(point.y().unwrap()),
        );
        Self { key, account }
    }

    fn sign(&self, digest: &B256) -> P256Signature {
        let signature: Signature = self.key.sign_prehash(digest.as_slice()).unwrap();
        P256Signature::from_slice(&signature.to_bytes()).unwrap()
    }
}

fn transaction(signature: &P256Signature) -> TransactionRequest {
    TransactionRequest {
        tx_type: EIP712_TX_TYPE,
        from: address!("000000000000000000000000000000000000dead"),
        to: Some(address!("000000000000000000000000000000000000beef")),
        chain_id: 260,
        nonce: 0,
        gas_limit: 500_000,
        gas_price: 100_000_000,
        gas_per_pubdata: 50_000,
        value: U256::ZERO,
        data: bytes!("a41368620000000000000000000000000000000000000000000000000000000000000020"),
        custom_signature: signature.to_bytes().to_vec().into(),
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn stores_public_key_once(#[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let wallet = Wallet::random(&mut rng);
    let (x, y) = (wallet.account.public_key().x, wallet.account.public_key().y);

    for _ in 0..4 {
        let digest = B256::from(rng.random::<[u8; 32]>());
        let signature = wallet.sign(&digest);
        assert_eq!(
            wallet
                .account
                .is_valid_signature(&digest, &signature.to_bytes()),
            EIP1271_MAGIC_VALUE
        );
        assert_eq!(wallet.account.public_key().x, x);
        assert_eq!(wallet.account.public_key().y, y);
        assert_eq!(wallet.account.public_key_coordinate(0), Some(x));
        assert_eq!(wallet.account.public_key_coordinate(1), Some(y));
    }
}

#[test]
fn valid_signature_returns_magic() {
    let mut rng = StdRng::seed_from_u64(0x1271);
    for _ in 0..8 {
        let wallet = Wallet::random(&mut rng);
        let digest = B256::from(rng.random::<[u8; 32]>());
        let signature = wallet.sign(&digest);
        assert_eq!(
            wallet
                .account
                .is_valid_signature(&digest, &signature.to_bytes()),
            EIP1271_MAGIC_VALUE
        );
    }
}

#[test]
fn malleable_signature_returns_magic() {
    let mut rng = StdRng::seed_from_u64(7);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = wallet.sign(&digest);
    let malleated = signature.malleated().unwrap();
    assert_ne!(signature, malleated);
    assert_eq!(
        wallet
            .account
            .is_valid_signature(&digest, &malleated.to_bytes()),
        EIP1271_MAGIC_VALUE
    );
}

#[test]
fn other_key_never_validates() {
    let mut rng = StdRng::seed_from_u64(8);
    let wallet = Wallet::random(&mut rng);
    let other = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = other.sign(&digest);

    assert_ne!(
        wallet
            .account
            .is_valid_signature(&digest, &signature.to_bytes()),
        EIP1271_MAGIC_VALUE
    );
    assert_eq!(
        wallet.account.verify(&digest, &signature.to_bytes()),
        Err(P256Error::SignatureMismatch)
    );
}

#[test]
fn group_order_scalars_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = wallet.sign(&digest);

    for bad in [
        P256Signature::new(P256_GROUP_ORDER, signature.s),
        P256Signature::new(signature.r, P256_GROUP_ORDER),
    ] {
        assert_ne!(
            wallet.account.is_valid_signature(&digest, &bad.to_bytes()),
            EIP1271_MAGIC_VALUE
        );
        assert_eq!(
            wallet.account.verify(&digest, &bad.to_bytes()),
            Err(P256Error::ScalarOutOfRange)
        );
    }
}

#[test]
fn off_curve_key_never_validates() {
    let mut rng = StdRng::seed_from_u64(10);
    let wallet = Wallet::random(&mut rng);
    let key = wallet.account.public_key();
    let mut y = key.y;
    y.0[0] ^= 0x01;
    let broken = P256Account::new(key.x, y);

    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = wallet.sign(&digest);
    assert_eq!(
        broken.verify(&digest, &signature.to_bytes()),
        Err(P256Error::InvalidPublicKey)
    );
    assert!(P256Account::try_new(key.x, y).is_err());
}

#[test]
fn replay_is_not_prevented_here() {
    let mut rng = StdRng::seed_from_u64(11);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let tx = transaction(&wallet.sign(&digest));

    assert_eq!(wallet.account.validate_transaction(&digest, &tx), Ok(()));
    assert_eq!(wallet.account.validate_transaction(&digest, &tx), Ok(()));
    assert_eq!(
        wallet.account.validate_transaction_magic(&digest, &tx),
        ACCOUNT_VALIDATION_SUCCESS_MAGIC
    );
}

#[test]
fn transaction_fields_other_than_signature_are_ignored() {
    let mut rng = StdRng::seed_from_u64(12);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let mut tx = transaction(&wallet.sign(&digest));
    tx.nonce = 42;
    tx.gas_limit = 1;
    tx.value = U256::from(1_000_000u64);

    assert_eq!(wallet.account.validate_transaction(&digest, &tx), Ok(()));
}

#[test]
fn transaction_with_malleated_signature_validates() {
    let mut rng = StdRng::seed_from_u64(13);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = wallet.sign(&digest).malleated().unwrap();
    let tx = transaction(&signature);

    assert_eq!(wallet.account.validate_transaction(&digest, &tx), Ok(()));
}

#[test]
fn transaction_signed_over_other_digest_is_rejected() {
    let mut rng = StdRng::seed_from_u64(14);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let other_digest = B256::from(rng.random::<[u8; 32]>());
    let tx = transaction(&wallet.sign(&other_digest));

    assert_eq!(
        wallet.account.validate_transaction(&digest, &tx),
        Err(AccountError::Signature(P256Error::SignatureMismatch))
    );
    assert_eq!(
        wallet.account.validate_transaction_magic(&digest, &tx),
        FixedBytes::<4>::ZERO
    );
}

#[test]
fn transaction_signature_must_be_64_bytes() {
    let mut rng = StdRng::seed_from_u64(15);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let signature = wallet.sign(&digest);
    let mut with_recovery_id = signature.to_bytes().to_vec();
    with_recovery_id.push(27);
    let tx = transaction(&signature).with_custom_signature(with_recovery_id);

    assert_eq!(
        wallet.account.validate_transaction(&digest, &tx),
        Err(AccountError::Signature(P256Error::MalformedInput))
    );
}

#[test]
fn non_eip712_transaction_is_rejected() {
    let mut rng = StdRng::seed_from_u64(16);
    let wallet = Wallet::random(&mut rng);
    let digest = B256::from(rng.random::<[u8; 32]>());
    let mut tx = transaction(&wallet.sign(&digest));
    tx.tx_type = 2;

    assert_eq!(
        wallet.account.validate_transaction(&digest, &tx),
        Err(AccountError::UnsupportedTxType(2))
    );
}
