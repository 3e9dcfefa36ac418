use saltmill::{derive_key, derive_key_blocking, random_salt, Error, Options, Strategy};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// RFC 7914 section 12, vector 1
const VECTOR_1: &str = "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442\
                        fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906";

#[tokio::test]
async fn cooperative_unsliced_matches_reference() {
    let dk = derive_key(b"", b"", &Options::new(16, 1, 1, 64)).await.unwrap();
    assert_eq!(hex(&dk), VECTOR_1);
}

#[tokio::test]
async fn interrupt_step_does_not_change_the_key() {
    for step in [1, 3, 16, 1000] {
        let options = Options::new(16, 1, 1, 64)
            .strategy(Strategy::Cooperative { interrupt_step: step });
        let dk = derive_key(b"", b"", &options).await.unwrap();
        assert_eq!(hex(&dk), VECTOR_1, "interrupt_step = {step}");
    }
}

// RFC 7914 section 12, vector 2: sixteen independent lanes
#[tokio::test(flavor = "multi_thread")]
async fn parallel_lanes_match_reference() {
    let options = Options::new(1024, 8, 16, 64).strategy(Strategy::Parallel);
    let dk = derive_key(b"password", b"NaCl", &options).await.unwrap();
    assert_eq!(
        hex(&dk),
        "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162\
         2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn strategies_agree() {
    // a password past the 64-byte HMAC key-compression boundary, and enough
    // lanes for completion order to matter
    let password = [0x61_u8; 65];
    let salt = b"NaCl";
    let base = Options::new(64, 2, 3, 48);
    let blocking = derive_key_blocking(&password, salt, &base).unwrap();
    let cooperative = derive_key(
        &password,
        salt,
        &base.strategy(Strategy::Cooperative { interrupt_step: 7 }),
    )
    .await
    .unwrap();
    let parallel = derive_key(&password, salt, &base.strategy(Strategy::Parallel))
        .await
        .unwrap();
    assert_eq!(blocking, cooperative);
    assert_eq!(blocking, parallel);
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let options = Options::from_log_n(4, 1, 2, 32);
    let a = derive_key(b"password", b"salt", &options).await.unwrap();
    let b = derive_key(b"password", b"salt", &options).await.unwrap();
    assert_eq!(a, b);
    let c = derive_key(b"password", b"pepper", &options).await.unwrap();
    assert_ne!(a, c);
}

#[tokio::test]
async fn rejects_invalid_parameters_before_any_work() {
    let check = |options: Options, expected: Error| async move {
        assert_eq!(derive_key(b"p", b"s", &options).await, Err(expected));
    };
    check(Options::new(0, 1, 1, 32), Error::CostOutOfRange).await;
    check(Options::new(3, 1, 1, 32), Error::CostNotPowerOfTwo).await;
    check(Options::new(1 << 31, 1, 1, 32), Error::CostOutOfRange).await;
    check(Options::new(16, 0, 1, 32), Error::BlockSizeTooSmall).await;
    check(Options::new(16, 1, 0, 32), Error::ParallelismTooSmall).await;
    check(Options::from_log_n(31, 1, 1, 32), Error::LogCostOutOfRange).await;

    let mut missing = Options::new(16, 1, 1, 32);
    missing.n = None;
    assert_eq!(derive_key(b"p", b"s", &missing).await, Err(Error::MissingCost));
    assert_eq!(
        derive_key_blocking(b"p", b"s", &missing),
        Err(Error::MissingCost)
    );
}

#[tokio::test]
async fn n_wins_over_log_n_when_both_are_set() {
    let mut options = Options::new(16, 1, 1, 32);
    options.log_n = Some(10);
    let both = derive_key(b"p", b"s", &options).await.unwrap();
    let n_only = derive_key(b"p", b"s", &Options::new(16, 1, 1, 32)).await.unwrap();
    assert_eq!(both, n_only);
}

#[tokio::test]
async fn zero_length_keys_and_truncation() {
    let empty = derive_key(b"p", b"s", &Options::new(16, 1, 1, 0)).await.unwrap();
    assert!(empty.is_empty());

    let long = derive_key(b"", b"", &Options::new(16, 1, 1, 64)).await.unwrap();
    let short = derive_key(b"", b"", &Options::new(16, 1, 1, 33)).await.unwrap();
    assert_eq!(short.len(), 33);
    assert_eq!(short, long[..33]);
}

#[test]
fn random_salts_are_fresh() {
    let salt = random_salt(16);
    assert_eq!(salt.len(), 16);
    assert_ne!(salt, random_salt(16));
    assert!(random_salt(0).is_empty());
}
