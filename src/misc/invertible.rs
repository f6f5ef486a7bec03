/// Trait for geometry whose direction can be reversed.
/// A reversed curve evaluates `t` where the original evaluates `1 - t`.
pub trait Invertible: Clone {
    fn invert(&mut self);
    fn inverse(&self) -> Self {
        let mut inv = self.clone();
        inv.invert();
        inv
    }
}
