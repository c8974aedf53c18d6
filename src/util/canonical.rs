use serde::Serialize;
use serde_json::{Error, Value};

/// Serializes `value` as canonical JSON: object keys sorted, no whitespace.
///
/// Ledger peers compare written bytes, so two encodings of the same record
/// must be identical regardless of field declaration order.
pub fn to_canonical_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    let tree = serde_json::to_value(value)?;
    let mut buf = Vec::with_capacity(64);
    write_canonical(&tree, &mut buf)?;
    Ok(buf)
}

fn write_canonical(v: &Value, buf: &mut Vec<u8>) -> Result<(), Error> {
    match v {
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_canonical(item, buf)?;
            }
            buf.push(b']');
        }
        Value::Object(obj) => {
            let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
            entries.sort_by_key(|(k, _)| *k);

            buf.push(b'{');
            for (i, (k, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                serde_json::to_writer(&mut *buf, k)?;
                buf.push(b':');
                write_canonical(val, buf)?;
            }
            buf.push(b'}');
        }
        scalar => serde_json::to_writer(&mut *buf, scalar)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::to_canonical_vec;
    use serde_json::{Value, json};

    fn canon(s: &str) -> String {
        let v: Value = serde_json::from_str(s).unwrap();
        String::from_utf8(to_canonical_vec(&v).unwrap()).unwrap()
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(canon(r#""foo""#), r#""foo""#);
        assert_eq!(canon("42"), "42");
        assert_eq!(canon("null"), "null");
    }

    #[test]
    fn keys_are_sorted_at_every_level() {
        let input = r#"{ "z": [ 3, {"b":1,"a":2} ], "a": { "y": false, "x": true } }"#;
        assert_eq!(canon(input), r#"{"a":{"x":true,"y":false},"z":[3,{"a":2,"b":1}]}"#);
    }

    #[test]
    fn struct_field_order_does_not_matter() {
        #[derive(serde::Serialize)]
        struct Rec {
            value: String,
            owner: String,
        }
        let rec = Rec { value: "v".into(), owner: "o".into() };
        let bytes = to_canonical_vec(&rec).unwrap();
        assert_eq!(bytes, to_canonical_vec(&json!({"value": "v", "owner": "o"})).unwrap());
        assert_eq!(bytes, br#"{"owner":"o","value":"v"}"#);
    }

    #[test]
    fn escapes_survive() {
        let out = canon(r#"{ "value": "line\none \"quoted\"" }"#);
        assert_eq!(out, r#"{"value":"line\none \"quoted\""}"#);
    }
}
