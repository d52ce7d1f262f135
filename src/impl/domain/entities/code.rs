/// Implements `serde::Serialize` for a closed enumeration by writing its
/// `code()` string.
macro_rules! serialize_as_code {
    ($($t:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $t {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.code())
                }
            }
        )+
    };
}

pub(crate) use serialize_as_code;
