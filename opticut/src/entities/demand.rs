use crate::entities::instance::{InstanceId, ShapeInstance};
use crate::entities::shape::ShapeKind;
use crate::error::Result;
use crate::io::svg::Color;
use log::{debug, warn};

/// Ordered multiset of [`ShapeInstance`]s waiting to be nested.
/// Owned by the caller, the engine only ever reads a [`snapshot`](DemandQueue::snapshot) of it.
#[derive(Debug, Clone, Default)]
pub struct DemandQueue {
    instances: Vec<ShapeInstance>,
}

impl DemandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` new instances of `kind`, tagged with the default colour of the kind.
    /// Returns the newly created instances.
    pub fn add(
        &mut self,
        kind: ShapeKind,
        quantity: usize,
        allow_rotation: bool,
    ) -> Result<&[ShapeInstance]> {
        let color = kind.shape_type().default_color();
        self.add_with_color(kind, quantity, allow_rotation, color)
    }

    /// Same as [`DemandQueue::add`], with an explicit colour tag.
    /// The parameters are validated before any instance is created, so a failure leaves the queue untouched.
    pub fn add_with_color(
        &mut self,
        kind: ShapeKind,
        quantity: usize,
        allow_rotation: bool,
        color: Color,
    ) -> Result<&[ShapeInstance]> {
        kind.resolve()?;
        if quantity == 0 {
            warn!("[DEMAND] quantity of 0 requested for {kind}, nothing added");
        }
        let start = self.instances.len();
        for _ in 0..quantity {
            self.instances
                .push(ShapeInstance::with_color(kind, allow_rotation, color)?);
        }
        debug!(
            "[DEMAND] added {quantity}x {kind} (rotation allowed: {allow_rotation}), {} instances in queue",
            self.instances.len()
        );
        Ok(&self.instances[start..])
    }

    /// Removes every instance from the queue
    pub fn reset(&mut self) {
        debug!("[DEMAND] reset, dropping {} instances", self.instances.len());
        self.instances.clear();
    }

    /// Read-only view of all instances, in insertion order
    pub fn snapshot(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn get(&self, id: InstanceId) -> Option<&ShapeInstance> {
        self.instances.iter().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Sum of the exact areas of all instances in the queue
    pub fn total_exact_area(&self) -> f64 {
        self.instances.iter().map(|i| i.exact_area()).sum()
    }
}
