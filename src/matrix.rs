//! Row-major (de)serialization for fixed-size matrices.
//!
//! nalgebra stores matrices column-major and serializes them that way. Camera
//! records are written row-major, so the matrix fields route through
//! `#[serde(with = "crate::matrix::row_major")]` instead.
//!
//! JSON has no encoding for NaN or infinities, so a matrix holding one fails to
//! serialize rather than being written as `null`.

pub(crate) mod row_major {
    use nalgebra::SMatrix;
    use serde::{
        Deserialize, Deserializer, Serializer,
        de::Error as _,
        ser::{Error as _, SerializeSeq},
    };

    pub fn serialize<S, const R: usize, const C: usize>(
        matrix: &SMatrix<f64, R, C>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some((index, value)) = matrix
            .transpose()
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(S::Error::custom(format!(
                "expected finite matrix entries but got {value} at row {}, column {}",
                index / C,
                index % C
            )));
        }

        let mut seq = serializer.serialize_seq(Some(R * C))?;
        for row in matrix.row_iter() {
            for value in row.iter() {
                seq.serialize_element(value)?;
            }
        }
        seq.end()
    }

    pub fn deserialize<'de, D, const R: usize, const C: usize>(
        deserializer: D,
    ) -> Result<SMatrix<f64, R, C>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f64>::deserialize(deserializer)?;
        if values.len() != R * C {
            return Err(D::Error::invalid_length(
                values.len(),
                &format!("{} values in row-major order", R * C).as_str(),
            ));
        }

        Ok(SMatrix::from_row_slice(&values))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Matrix3, Matrix4};
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper3 {
        #[serde(with = "super::row_major")]
        m: Matrix3<f64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper4 {
        #[serde(with = "super::row_major")]
        m: Matrix4<f64>,
    }

    #[test]
    fn writes_rows_first() {
        let w = Wrapper3 {
            m: Matrix3::new(1., 2., 3., 4., 5., 6., 7., 8., 9.),
        };
        assert_eq!(
            serde_json::to_string(&w).unwrap(),
            r#"{"m":[1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.0,9.0]}"#
        );
    }

    #[test]
    fn reads_rows_first() {
        let w: Wrapper4 = serde_json::from_str(
            r#"{"m":[1,0,0,5, 0,1,0,6, 0,0,1,7, 0,0,0,1]}"#,
        )
        .unwrap();
        assert_eq!(w.m[(0, 3)], 5.0);
        assert_eq!(w.m[(1, 3)], 6.0);
        assert_eq!(w.m[(2, 3)], 7.0);
        assert_eq!(w.m[(3, 0)], 0.0);
    }

    #[rstest]
    #[case(1, f64::NAN)]
    #[case(5, f64::INFINITY)]
    #[case(8, f64::NEG_INFINITY)]
    fn rejects_non_finite(#[case] index: usize, #[case] value: f64) {
        let mut w = Wrapper3 {
            m: Matrix3::identity(),
        };
        w.m[(index / 3, index % 3)] = value;

        let err = serde_json::to_string(&w).unwrap_err();
        assert!(err.to_string().contains(&format!(
            "at row {}, column {}",
            index / 3,
            index % 3
        )));
    }

    #[test]
    fn rejects_wrong_length() {
        let result = serde_json::from_str::<Wrapper3>(r#"{"m":[1,0,0,0,1,0,0,0]}"#);
        assert!(result.is_err());
    }
}
