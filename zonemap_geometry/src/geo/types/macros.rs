/// Implements [`CompositeGeometryTrait`](crate::CompositeGeometryTrait) for a newtype over
/// `Vec<Part>`, together with conversions from vectors, slices and arrays of anything the
/// part type converts from.
#[macro_export]
macro_rules! impl_composite_geometry {
	($geometry:ty, $part:ty) => {
		impl $crate::CompositeGeometryTrait<$part> for $geometry {
			fn new() -> Self {
				Self(Vec::new())
			}

			fn parts(&self) -> &[$part] {
				&self.0
			}
		}

		impl<T> From<Vec<T>> for $geometry
		where
			$part: From<T>,
		{
			fn from(parts: Vec<T>) -> Self {
				Self(parts.into_iter().map(<$part>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $geometry
		where
			$part: From<&'a T>,
		{
			fn from(parts: &'a [T]) -> Self {
				Self(parts.iter().map(<$part>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $geometry
		where
			$part: From<&'a T>,
		{
			fn from(parts: &'a [T; N]) -> Self {
				Self::from(parts.as_slice())
			}
		}
	};
}
