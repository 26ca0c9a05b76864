pub mod queue_writer;
