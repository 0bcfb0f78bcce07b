// Copyright (c) 2025 Elektrobit Automotive GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.
//
// SPDX-License-Identifier: Apache-2.0

use model_macros::model_object;

/// Describes a tag applied to a resource in an environment.
#[model_object]
pub struct Tag {
    /// The key of the tag.
    #[model(mandatory, length(min = 1, max = 128))]
    key: Option<String>,
    /// The value of the tag.
    #[model(length(max = 256))]
    value: Option<String>,
}

#[model_object]
pub struct ListTagsForResourceRequest {
    /// The Amazon Resource Name (ARN) of the resource for which a tag list is
    /// requested.
    #[model(mandatory)]
    resource_arn: Option<String>,
}

#[model_object]
pub struct ListTagsForResourceResult {
    resource_arn: Option<String>,
    /// A list of tag key-value pairs.
    resource_tags: Option<Vec<Tag>>,
}

/// Adds and removes tags of a resource. Tags to add and to remove cannot
/// share keys.
#[model_object]
pub struct UpdateTagsForResourceRequest {
    #[model(mandatory)]
    resource_arn: Option<String>,
    /// A list of tags to add or update. If a key of an existing tag is added,
    /// the tag's value is updated.
    tags_to_add: Option<Vec<Tag>>,
    /// A list of tag keys to remove. If a tag key doesn't exist, it is
    /// silently ignored.
    tags_to_remove: Option<Vec<String>>,
}

//////////////////////////////////////////////////////////////////////////////
//                 ########  #######    #########  #########                //
//                    ##     ##        ##             ##                    //
//                    ##     #####     #########      ##                    //
//                    ##     ##                ##     ##                    //
//                    ##     #######   #########      ##                    //
//////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Tag, UpdateTagsForResourceRequest};
    use crate::ModelError;

    #[test]
    fn utest_tag_key_length_bounds() {
        assert!(Tag::builder().with_key("k".repeat(128)).build().is_ok());
        assert_eq!(
            Tag::builder().with_key("").build(),
            Err(ModelError::LengthOutOfBounds {
                field: "Tag.Key".into(),
                length: 0,
                min: Some(1),
                max: Some(128),
            })
        );
    }

    #[test]
    fn utest_update_tags_set_and_clear() {
        let mut builder = UpdateTagsForResourceRequest::builder()
            .with_resource_arn("arn:aws:elasticbeanstalk:us-east-1:123456789012:environment/app/env")
            .append_tags_to_remove(["stage".to_string()]);
        assert_eq!(builder.tags_to_remove(), Some(&["stage".to_string()][..]));

        builder.set_tags_to_remove(None);
        assert_eq!(builder.tags_to_remove(), None);

        let request = builder.build().unwrap();
        assert_eq!(
            request.to_string(),
            "{ResourceArn: arn:aws:elasticbeanstalk:us-east-1:123456789012:environment/app/env}"
        );
    }
}
