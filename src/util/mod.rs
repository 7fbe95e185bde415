pub mod char_class;
