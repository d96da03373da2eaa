//! Type operators
//!
//! `Union`, `Intersect`, and `Difference` are derived types defined by an
//! ordered list of operand type references. They are pure data holders: no
//! operator computes a resulting type extension — evaluation, if needed, is
//! an external collaborator's responsibility.

use serde::{Deserialize, Serialize};

use super::element::ElementData;

/// A derived type formed as the union of its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    #[serde(flatten)]
    pub element: ElementData,

    /// Ordered, deduplicated operand type ids
    pub operands: Vec<String>,
}

impl UnionType {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            element: ElementData::new(id),
            operands: Vec::new(),
        }
    }

    /// Append an operand, preserving order and skipping duplicates
    pub fn add_operand(&mut self, type_id: impl Into<String>) {
        let type_id = type_id.into();
        if !self.operands.contains(&type_id) {
            self.operands.push(type_id);
        }
    }

    /// Remove an operand, returning whether it was present
    pub fn remove_operand(&mut self, type_id: &str) -> bool {
        let before = self.operands.len();
        self.operands.retain(|id| id != type_id);
        self.operands.len() != before
    }
}

/// A derived type formed as the intersection of its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectType {
    #[serde(flatten)]
    pub element: ElementData,

    /// Ordered, deduplicated operand type ids
    pub operands: Vec<String>,
}

impl IntersectType {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            element: ElementData::new(id),
            operands: Vec::new(),
        }
    }

    /// Append an operand, preserving order and skipping duplicates
    pub fn add_operand(&mut self, type_id: impl Into<String>) {
        let type_id = type_id.into();
        if !self.operands.contains(&type_id) {
            self.operands.push(type_id);
        }
    }

    /// Remove an operand, returning whether it was present
    pub fn remove_operand(&mut self, type_id: &str) -> bool {
        let before = self.operands.len();
        self.operands.retain(|id| id != type_id);
        self.operands.len() != before
    }
}

/// A derived type formed as the difference of exactly two operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceType {
    #[serde(flatten)]
    pub element: ElementData,

    pub first_operand: String,
    pub second_operand: String,
}

impl DifferenceType {
    pub fn new(
        id: impl Into<String>,
        first_operand: impl Into<String>,
        second_operand: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            first_operand: first_operand.into(),
            second_operand: second_operand.into(),
        }
    }

    /// Replace both operands atomically
    pub fn update_operands(
        &mut self,
        first_operand: impl Into<String>,
        second_operand: impl Into<String>,
    ) {
        self.first_operand = first_operand.into();
        self.second_operand = second_operand.into();
    }
}

/// Sum type unifying all type operators for storage and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum TypeOperator {
    Union(UnionType),
    Intersect(IntersectType),
    Difference(DifferenceType),
}

impl TypeOperator {
    /// The operator's id
    pub fn id(&self) -> &str {
        &self.element().id
    }

    /// Shared element metadata
    pub fn element(&self) -> &ElementData {
        match self {
            TypeOperator::Union(op) => &op.element,
            TypeOperator::Intersect(op) => &op.element,
            TypeOperator::Difference(op) => &op.element,
        }
    }

    /// Mutable shared element metadata
    pub fn element_mut(&mut self) -> &mut ElementData {
        match self {
            TypeOperator::Union(op) => &mut op.element,
            TypeOperator::Intersect(op) => &mut op.element,
            TypeOperator::Difference(op) => &mut op.element,
        }
    }

    /// Wire discriminator for this operator's concrete kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeOperator::Union(_) => "Union",
            TypeOperator::Intersect(_) => "Intersect",
            TypeOperator::Difference(_) => "Difference",
        }
    }
}

impl From<UnionType> for TypeOperator {
    fn from(op: UnionType) -> Self {
        TypeOperator::Union(op)
    }
}

impl From<IntersectType> for TypeOperator {
    fn from(op: IntersectType) -> Self {
        TypeOperator::Intersect(op)
    }
}

impl From<DifferenceType> for TypeOperator {
    fn from(op: DifferenceType) -> Self {
        TypeOperator::Difference(op)
    }
}
