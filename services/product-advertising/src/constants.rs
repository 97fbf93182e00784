// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Default endpoint of the US marketplace.
pub const DEFAULT_HOST: &str = "webservices.amazon.com";
pub const DEFAULT_PATH: &str = "/onca/xml";

// Fixed query values.
pub const SERVICE: &str = "AWSECommerceService";
pub const VERSION: &str = "2013-08-01";
pub const RESPONSE_GROUP: &str = "Images,ItemAttributes";
pub const AVAILABILITY: &str = "Available";
pub const DEFAULT_SEARCH_INDEX: &str = "All";
pub const ID_TYPE: &str = "ASIN";
pub const CONDITION: &str = "All";

// Query parameter names, listed in canonical order.
pub const AWS_ACCESS_KEY_ID_PARAM: &str = "AWSAccessKeyId";
pub const ASSOCIATE_TAG_PARAM: &str = "AssociateTag";
pub const AVAILABILITY_PARAM: &str = "Availability";
pub const BRAND_PARAM: &str = "Brand";
pub const KEYWORDS_PARAM: &str = "Keywords";
pub const OPERATION_PARAM: &str = "Operation";
pub const RESPONSE_GROUP_PARAM: &str = "ResponseGroup";
pub const SEARCH_INDEX_PARAM: &str = "SearchIndex";
pub const ITEM_ID_PARAM: &str = "ItemId";
pub const ID_TYPE_PARAM: &str = "IdType";
pub const CONDITION_PARAM: &str = "Condition";
pub const SERVICE_PARAM: &str = "Service";
pub const TIMESTAMP_PARAM: &str = "Timestamp";
pub const VERSION_PARAM: &str = "Version";
pub const SIGNATURE_PARAM: &str = "Signature";

// Link description carrying the technical details url.
pub const TECHNICAL_DETAILS: &str = "Technical Details";
pub const NO_PRICE: &str = "No Price";

// Env values used by product advertising.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_ASSOCIATE_TAG: &str = "AWS_ASSOCIATE_TAG";
pub const AWS_PA_ENDPOINT: &str = "AWS_PA_ENDPOINT";
