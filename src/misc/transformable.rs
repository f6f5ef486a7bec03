/// A trait for geometry that can be moved by a given transform type.
/// Geometry is never mutated behind the caller's back: `transformed` returns a new value.
pub trait Transformable<T>: Clone {
    fn transform(&mut self, transform: T);

    fn transformed(&self, transform: T) -> Self {
        let mut clone = self.clone();
        clone.transform(transform);
        clone
    }
}
