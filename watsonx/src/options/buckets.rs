//! Bucket registration options.

use watsonx_definitions::watsonx_data::{
    BucketObjectCollection, BucketRegistrationCollection, BucketRegistrationResult,
    CreateBucketRegistrationBody, SuccessResponseBody,
};

options! {
    /// Options for `list_bucket_registrations`.
    ListBucketRegistrationsOptions = "ListBucketRegistrations" -> BucketRegistrationCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_bucket_registration`.
    ///
    /// ```rust
    /// use watsonx_data::options::CreateBucketRegistrationOptions;
    /// use watsonx_data::Operation;
    /// use watsonx_definitions::watsonx_data::CreateBucketRegistrationBody;
    ///
    /// let options = CreateBucketRegistrationOptions::new(CreateBucketRegistrationBody::new(
    ///     "ibm_cos",
    ///     "sampleCatalog",
    ///     "COS bucket for customer data",
    ///     "ibm",
    ///     "iceberg",
    /// ));
    /// assert!(options.validate().is_ok());
    /// ```
    CreateBucketRegistrationOptions = "CreateBucketRegistration" -> BucketRegistrationResult {
        path: [],
        query: [],
        json: CreateBucketRegistrationBody,
    }
}

options! {
    /// Options for `get_bucket_registration`.
    GetBucketRegistrationOptions = "GetBucketRegistration" -> BucketRegistrationResult {
        path: [bucket_id],
        query: [],
    }
}

options! {
    /// Options for `delete_bucket_registration`.
    DeleteBucketRegistrationOptions = "DeleteBucketRegistration" -> () {
        path: [bucket_id],
        query: [],
    }
}

options! {
    /// Options for `update_bucket_registration`.
    UpdateBucketRegistrationOptions = "UpdateBucketRegistration" -> BucketRegistrationResult {
        path: [bucket_id],
        query: [],
        patch,
    }
}

options! {
    /// Options for `create_activate_bucket`.
    CreateActivateBucketOptions = "CreateActivateBucket" -> SuccessResponseBody {
        path: [bucket_id],
        query: [],
    }
}

options! {
    /// Options for `delete_deactivate_bucket`.
    DeleteDeactivateBucketOptions = "DeleteDeactivateBucket" -> () {
        path: [bucket_id],
        query: [],
    }
}

options! {
    /// Options for `list_bucket_objects`.
    ListBucketObjectsOptions = "ListBucketObjects" -> BucketObjectCollection {
        path: [bucket_id],
        query: [],
    }
}
