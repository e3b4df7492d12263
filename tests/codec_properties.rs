#![allow(clippy::unwrap_used, clippy::expect_used)]

use num_bigint::{BigInt, BigUint};
use pincode32::{
    Alias, Codec, CodecConfig, Error, EscapeRule, Mode, NormalizeOptions, Policy, UrlMode, CHARSET,
};

fn scenario_codec() -> Codec {
    let config = CodecConfig {
        normalize: NormalizeOptions {
            url_mode: UrlMode::HostPath,
            separators: "/".to_string(),
            ..NormalizeOptions::default()
        },
        escapes: vec![
            EscapeRule::new("Q", "QQ"),
            EscapeRule::new("q", "QQ"),
            EscapeRule::new(" ", "QX"),
            EscapeRule::new("!", "QB"),
        ],
        ..CodecConfig::default()
    };
    Codec::new(&config).unwrap()
}

#[test]
fn decode_inverts_encode() {
    let codec = Codec::standard();
    let mut n = BigUint::from(1u32);
    for step in 0u32..200 {
        let code = codec.encode_unsigned(&n);
        assert_eq!(codec.decode(&code, Policy::Reject).unwrap(), n);
        n = n * BigUint::from(7u32) + BigUint::from(step);
    }
}

#[test]
fn encode_zero_and_minimum_length() {
    let codec = Codec::standard();
    assert_eq!(codec.encode(&BigInt::from(0)).unwrap(), "00");
    for n in 0u32..32 {
        assert_eq!(codec.encode(&BigInt::from(n)).unwrap().len(), 2);
    }
}

#[test]
fn encode_31_is_padded_last_symbol() {
    let codec = Codec::standard();
    let last = char::from(CHARSET[31]);
    assert_eq!(codec.encode(&BigInt::from(31)).unwrap(), format!("0{last}"));
}

#[test]
fn encode_rejects_negative() {
    let codec = Codec::standard();
    assert!(matches!(
        codec.encode(&BigInt::from(-1)),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn encoded_output_uses_only_alphabet_with_lower_sentinel() {
    let codec = Codec::standard();
    let n: BigUint = "340282366920938463463374607431768211455".parse().unwrap();
    let code = codec.encode_unsigned(&n);
    assert!(code.chars().all(|c| codec.alphabet().contains(c)));
    assert!(code
        .chars()
        .filter(char::is_ascii_alphabetic)
        .all(|c| c.is_ascii_uppercase() || Some(c) == codec.alphabet().sentinel()));
}

#[test]
fn empty_inputs() {
    let codec = Codec::standard();
    assert_eq!(codec.decode("", Policy::Reject).unwrap(), BigUint::from(0u32));
    assert_eq!(codec.normalize(""), "");
    assert_eq!(codec.escape(""), "");
    assert_eq!(codec.unescape(""), "");
}

#[test]
fn policies_on_one_illegal_character() {
    let codec = Codec::standard();
    let err = codec.decode("A*B", Policy::Reject).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCharacter {
            character: '*',
            index: 1
        }
    ));
    assert_eq!(
        codec.decode("A*B", Policy::Skip).unwrap(),
        codec.decode("AB", Policy::Reject).unwrap()
    );
    assert_eq!(
        codec.decode("A*B", Policy::Zero).unwrap(),
        codec.decode("A0B", Policy::Reject).unwrap()
    );
}

#[test]
fn unescape_inverts_escape_for_canonical_text() {
    let codec = Codec::standard();
    for s in ["QUICK BROWN FOX!", "Q", "QQQ", "a=b&c=d", "(x, y) @ #1"] {
        assert_eq!(codec.unescape(&codec.escape(s)), s);
    }
}

#[test]
fn single_forward_pass_does_not_re_escape_tokens() {
    let codec = Codec::standard();
    let once = codec.escape("Q!");
    assert_eq!(once, "QQQB");
    assert_eq!(codec.unescape(&once), "Q!");
}

#[test]
fn url_scenario_round_trip_is_lossy_but_consistent() {
    let codec = scenario_codec();
    let raw = "http://example.com/Hello World!";

    assert_eq!(codec.extract_payload(raw), "example.com/Hello World!");
    let escaped = codec.escape(&codec.extract_payload(raw));
    assert_eq!(escaped, "example.com/HelloQXWorldQB");

    let normalized = codec.normalize(raw);
    assert_eq!(normalized, "EXAMP1EC0MHE110QXW0R1DQB");

    let number = codec.decode(&normalized, Policy::Reject).unwrap();
    let code = codec.encode_unsigned(&number);
    assert_eq!(code, normalized);
    // 大小写、分隔符和形近字符不可恢复
    assert_eq!(codec.unescape(&code), "EXAMP1EC0MHE110 W0R1D!");
}

#[test]
fn leading_zero_padding_is_not_preserved() {
    let codec = Codec::standard();
    let n = codec.decode("000A", Policy::Reject).unwrap();
    assert_eq!(codec.encode_unsigned(&n), "0A");
}

#[test]
fn convert_modes_through_facade() {
    let codec = Codec::standard();
    let decoded = codec.convert_auto("https://example.com/a-b").unwrap();
    assert_eq!(decoded.mode, Mode::Decode);
    assert_eq!(decoded.payload.as_deref(), Some("EXAMP1EQDC0MAQHB"));

    let recovered = codec.convert(&decoded.output, Mode::Recover).unwrap();
    assert_eq!(recovered.output, "EXAMP1E.C0MA-B");
}

#[test]
fn shared_codec_across_threads() {
    let codec = std::sync::Arc::new(scenario_codec());
    let handles: Vec<_> = (0u32..4)
        .map(|i| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || {
                let n = BigUint::from(1000u32 + i);
                codec.decode(&codec.encode_unsigned(&n), Policy::Reject).unwrap() == n
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn configs_that_would_corrupt_tokens_are_rejected() {
    // 别名源是字母表字符：折叠会把空格记号 QX 改成 Q0
    let mut config = CodecConfig::default();
    config.aliases.push(Alias::new('X', '0'));
    assert!(matches!(
        Codec::new(&config),
        Err(Error::InvalidAlias { from: 'X', to: '0' })
    ));

    // 多字符字面量跨过 QQ 的边界
    let config = CodecConfig {
        escapes: vec![EscapeRule::new("Q", "QQ"), EscapeRule::new("QB", "QD")],
        ..CodecConfig::default()
    };
    assert!(matches!(
        Codec::new(&config),
        Err(Error::InvalidEscapeTable(_))
    ));
}
