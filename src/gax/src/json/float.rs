// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Floating point fields.
//!
//! JSON has no representation for NaN or the infinities. AWS JSON protocols
//! send them as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`. Finite
//! values are written verbatim.

pub type F32 = Float<f32>;
pub type F64 = Float<f64>;

pub struct Float<T>(std::marker::PhantomData<T>);

/// Abstracts over `f32` and `f64`.
pub trait FloatExt: Copy + 'static {
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const BITS: usize;
    const MIN: f64;
    const MAX: f64;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
    fn from_f64(value: f64) -> Self;
    fn serialize<S>(self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer;
}

impl FloatExt for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const BITS: usize = 32;
    const MIN: f64 = f32::MIN as f64;
    const MAX: f64 = f32::MAX as f64;
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }
    fn from_f64(value: f64) -> Self {
        // Precision loss is expected, the service sends `float` values.
        value as f32
    }
    fn serialize<S>(self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_f32(self)
    }
}

impl FloatExt for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const BITS: usize = 64;
    const MIN: f64 = f64::MIN;
    const MAX: f64 = f64::MAX;
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }
    fn from_f64(value: f64) -> Self {
        value
    }
    fn serialize<S>(self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_f64(self)
    }
}

impl<T> serde_with::SerializeAs<T> for Float<T>
where
    T: FloatExt,
{
    fn serialize_as<S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match *value {
            x if x.is_nan() => serializer.serialize_str("NaN"),
            x if x.is_infinite() && x.is_sign_negative() => serializer.serialize_str("-Infinity"),
            x if x.is_infinite() => serializer.serialize_str("Infinity"),
            x => x.serialize(serializer),
        }
    }
}

impl<'de, T> serde_with::DeserializeAs<'de, T> for Float<T>
where
    T: FloatExt,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatVisitor::<T>(std::marker::PhantomData))
    }
}

struct FloatVisitor<T>(std::marker::PhantomData<T>);

impl<T> serde::de::Visitor<'_> for FloatVisitor<T>
where
    T: FloatExt,
{
    type Value = T;

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match value {
            "NaN" => Ok(T::NAN),
            "Infinity" => Ok(T::INFINITY),
            "-Infinity" => Ok(T::NEG_INFINITY),
            _ => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(value),
                &self,
            )),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match value {
            _ if value < T::MIN || value > T::MAX => Err(E::invalid_value(
                serde::de::Unexpected::Float(value),
                &self,
            )),
            _ => Ok(T::from_f64(value)),
        }
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from_f64(value as f64))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from_f64(value as f64))
    }

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a {}-bit floating point number, or one of NaN, Infinity, -Infinity",
            T::BITS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(9876.5)]
    #[test_case(0.0)]
    #[test_case(0.987)]
    fn roundtrip(input: f32) -> Result {
        let got = F32::serialize_as(&input, serde_json::value::Serializer)?;
        let rt = F32::deserialize_as(got)?;
        assert_eq!(input, rt);
        Ok(())
    }

    #[test]
    fn roundtrip_nan() -> Result {
        let got = F32::serialize_as(&f32::NAN, serde_json::value::Serializer)?;
        assert_eq!("NaN", got);
        let rt = F32::deserialize_as(got)?;
        assert!(rt.is_nan(), "expected NaN, got {rt}");
        Ok(())
    }

    #[test_case(f64::INFINITY, "Infinity")]
    #[test_case(f64::NEG_INFINITY, "-Infinity")]
    fn roundtrip_inf(input: f64, want: &str) -> Result {
        let got = F64::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(want, got);
        let rt = F64::deserialize_as(got)?;
        assert_eq!(rt, input);
        Ok(())
    }

    #[test]
    fn integers() -> Result {
        let got = F32::deserialize_as(serde_json::json!(3))?;
        assert_eq!(got, 3.0);
        let got = F64::deserialize_as(serde_json::json!(-3))?;
        assert_eq!(got, -3.0);
        Ok(())
    }

    #[test]
    fn verbatim() -> Result {
        let mut buffer = Vec::new();
        F32::serialize_as(&0.987_f32, &mut serde_json::Serializer::new(&mut buffer))?;
        assert_eq!(String::from_utf8(buffer)?, "0.987");
        Ok(())
    }

    #[test]
    fn deserialize_expect_err() {
        assert!(F32::deserialize_as(serde_json::json!("not a special float string")).is_err());
        assert!(F32::deserialize_as(serde_json::Value::Bool(false)).is_err());
    }

    #[test_case(serde_json::json!(f32::MAX as f64 * 2.0))]
    #[test_case(serde_json::json!(f32::MIN as f64 * 2.0))]
    #[test_case(serde_json::json!(1e300))]
    fn deserialize_expect_err_32(input: serde_json::Value) {
        let got = F32::deserialize_as(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test_case(serde_json::json!(f32::MAX as f64))]
    #[test_case(serde_json::json!(f32::MIN as f64))]
    fn deserialize_range_limits_32(input: serde_json::Value) -> Result {
        let got = F32::deserialize_as(input)?;
        assert!(got.is_finite(), "{got}");
        Ok(())
    }

    #[test]
    fn deserialize_large_64() -> Result {
        let got = F64::deserialize_as(serde_json::json!(1e300))?;
        assert_eq!(got, 1e300);
        Ok(())
    }
}
