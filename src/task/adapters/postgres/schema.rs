//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Uuid,
        /// Insertion sequence used as the ordering tie-break.
        seq -> Int8,
        /// Task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Date the task was created; never updated.
        created_on -> Date,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional priority.
        #[max_length = 10]
        priority -> Nullable<Varchar>,
        /// Optional due date.
        due_date -> Nullable<Date>,
    }
}
