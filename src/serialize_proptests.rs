use super::*;
use proptest::prelude::*;

/// 変換可能な値ツリーを生成する（Invalid は含まない）
fn value_strategy() -> impl Strategy<Value = SassValue> {
    let leaf = prop_oneof![
        Just(SassValue::Null),
        any::<bool>().prop_map(SassValue::Boolean),
        (-1.0e9..1.0e9f64).prop_map(SassValue::Number),
        "[a-z0-9 ]{0,12}".prop_map(SassValue::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(SassValue::List),
            prop::collection::vec(("[a-z][a-z0-9-]{0,8}", inner), 0..6).prop_map(SassValue::Map),
        ]
    })
}

/// 変数名に使える文字列
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}".prop_map(|s| s)
}

proptest! {
    /// 同じ値は何度変換しても同じテキストになる
    #[test]
    fn prop_serialize_is_deterministic(value in value_strategy()) {
        let first = serialize(&value).unwrap();
        let second = serialize(&value).unwrap();

        prop_assert_eq!(first, second);
    }

    /// リストは要素数と順序を保つ（スカラー要素はカンマを含まない）
    #[test]
    fn prop_list_preserves_count(numbers in prop::collection::vec(-1000..1000i32, 0..10)) {
        let list = SassValue::List(
            numbers.iter().map(|n| SassValue::Number(*n as f64)).collect(),
        );

        let text = serialize(&list).unwrap();

        prop_assert!(text.starts_with('('));
        prop_assert!(text.ends_with(')'));

        let inner = &text[1..text.len() - 1];
        let count = if inner.is_empty() {
            0
        } else {
            inner.split(", ").count()
        };
        prop_assert_eq!(count, numbers.len());
    }

    /// 数値トークンは f64 として読み戻すと元の値になる
    #[test]
    fn prop_number_token_roundtrips(n in -1.0e15..1.0e15f64) {
        let text = serialize(&SassValue::Number(n)).unwrap();

        prop_assert_eq!(text.parse::<f64>().unwrap(), n);
    }

    /// 割当文は常に `$name: value;` の形になる
    #[test]
    fn prop_assign_shape(name in name_strategy(), value in value_strategy()) {
        let statement = assign(&name, &value).unwrap();
        let literal = serialize(&value).unwrap();

        prop_assert_eq!(statement, format!("${}: {};", name, literal));
    }

    /// 引用符・バックスラッシュを含まない文字列は素通しで引用される
    #[test]
    fn prop_plain_string_is_wrapped_verbatim(s in "[a-zA-Z0-9 .,_-]{0,20}") {
        let text = serialize(&SassValue::String(s.clone())).unwrap();

        prop_assert_eq!(text, format!("\"{}\"", s));
    }
}
