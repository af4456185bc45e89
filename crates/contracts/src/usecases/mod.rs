pub mod u401_batch_create_objects;
