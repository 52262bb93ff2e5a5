pub type CustomResult<T, E> = error_stack::Result<T, E>;
