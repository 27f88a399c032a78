pub mod resource_descriptor;
