pub mod provider;
pub mod shoot;
pub mod v1alpha1;
