use super::*;
use crate::Value;

crate::alias_enum! {
    enum Codec {
        Libx264,
        Mpeg4,
        ProresKs = "prores_ks",
        H264Nvenc = "h264_nvenc",
    }
}

#[test]
fn declared_token_overrides_lowercased_name() {
    assert_eq!(Codec::ProresKs.command(), "prores_ks");
    assert_eq!(Codec::H264Nvenc.command(), "h264_nvenc");
}

#[test]
fn undeclared_token_falls_back_to_lowercase() {
    assert_eq!(Codec::Libx264.command(), "libx264");
    assert_eq!(Codec::Mpeg4.command(), "mpeg4");
    assert_eq!(Codec::Mpeg4.to_string(), "mpeg4");
}

#[test]
fn resolve_alias_reads_memoized_table() {
    assert_eq!(resolve_alias::<Codec>("ProresKs"), "prores_ks");
    assert!(std::ptr::eq(Codec::alias_table(), Codec::alias_table()));
    assert_eq!(Codec::alias_table().len(), 4);
    assert!(Codec::alias_table().get("Vp9").is_none());
}

#[test]
#[should_panic(expected = "is not declared")]
fn resolving_an_undeclared_variant_panics() {
    resolve_alias::<Codec>("Vp9");
}

#[test]
fn concurrent_first_lookups_share_one_table() {
    crate::alias_enum! {
        enum Fresh {
            One,
            Two = "2",
        }
    }

    let addrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| Fresh::alias_table() as *const AliasTable as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(Fresh::Two.command(), "2");
    assert_eq!(Fresh::One.command(), "one");
}

#[test]
fn values_carry_the_wire_token() {
    assert_eq!(Value::from(Codec::ProresKs), Value::Alias("prores_ks"));
    assert_eq!(Value::from(Codec::Libx264).normalize(), "libx264");
}

#[test]
fn from_command_reverses_the_mapping() {
    assert_eq!(Codec::from_command("prores_ks"), Some(Codec::ProresKs));
    assert_eq!(Codec::from_command("ProresKs"), None);
}
