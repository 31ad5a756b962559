//! In-memory record store
//!
//! One DashMap per record type, keyed by generated id. Records are only ever
//! inserted; the analytics counters are the single exception and are mutated
//! through their map entry. Everything is lost on restart.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{
    Analytics, HeritageStory, ImageAnalysis, NewHeritageStory, NewImageAnalysis, NewPortfolio,
    NewProductListing, NewSocialPost, NewStory, NewUser, Portfolio, ProductListing, SocialPost,
    Story, User,
};

/// The implied current user for every dashboard route.
pub const DEMO_USER_ID: &str = "demo-user-1";

const DEMO_PROFILE_IMAGE: &str = "https://images.unsplash.com/photo-1544717297-fa95b6ee9643?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=150&h=150";

/// In-memory store for every studio record type.
///
/// Analytics are keyed by user id rather than record id, so a counter bump is
/// a single entry lookup.
#[derive(Default)]
pub struct StudioStorage {
    users: DashMap<String, User>,
    stories: DashMap<String, Story>,
    image_analyses: DashMap<String, ImageAnalysis>,
    social_posts: DashMap<String, SocialPost>,
    product_listings: DashMap<String, ProductListing>,
    heritage_stories: DashMap<String, HeritageStory>,
    portfolios: DashMap<String, Portfolio>,
    analytics: DashMap<String, Analytics>,
}

impl StudioStorage {
    /// Fresh store with the demo artisan seeded, matching the dashboard's
    /// single-user mode.
    pub fn new() -> Self {
        let storage = Self::default();
        storage.seed_demo_user();
        storage
    }

    fn seed_demo_user(&self) {
        let user = User {
            id: DEMO_USER_ID.to_string(),
            username: "maria".to_string(),
            name: "Maria".to_string(),
            craft_type: "Pottery".to_string(),
            email: "maria@craftai.com".to_string(),
            profile_image: Some(DEMO_PROFILE_IMAGE.to_string()),
            created_at: Utc::now(),
        };

        self.analytics.insert(
            user.id.clone(),
            Analytics {
                id: Uuid::new_v4().to_string(),
                user_id: user.id.clone(),
                stories_generated: 24,
                images_analyzed: 156,
                social_posts: 48,
                revenue_growth: 34,
                updated_at: Utc::now(),
            },
        );
        self.users.insert(user.id.clone(), user);
    }

    /// Mutate a user's analytics in place, bumping updated_at.
    fn touch_analytics<F: FnOnce(&mut Analytics)>(&self, user_id: &str, apply: F) {
        if let Some(mut entry) = self.analytics.get_mut(user_id) {
            apply(&mut entry);
            entry.updated_at = Utc::now();
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|u| u.value().clone())
    }

    /// Create a user with zeroed analytics.
    pub fn create_user(&self, new: NewUser) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            name: new.name,
            craft_type: new.craft_type,
            email: new.email,
            profile_image: new.profile_image,
            created_at: Utc::now(),
        };

        self.analytics.insert(
            user.id.clone(),
            Analytics {
                id: Uuid::new_v4().to_string(),
                user_id: user.id.clone(),
                stories_generated: 0,
                images_analyzed: 0,
                social_posts: 0,
                revenue_growth: 0,
                updated_at: Utc::now(),
            },
        );
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn get_analytics(&self, user_id: &str) -> Option<Analytics> {
        self.analytics.get(user_id).map(|a| a.value().clone())
    }

    // ------------------------------------------------------------------
    // Stories
    // ------------------------------------------------------------------

    pub fn create_story(&self, new: NewStory) -> Story {
        let story = Story {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            content: new.content,
            craft_type: new.craft_type,
            focus: new.focus,
            created_at: Utc::now(),
        };
        self.stories.insert(story.id.clone(), story.clone());
        self.touch_analytics(&story.user_id, |a| a.stories_generated += 1);
        story
    }

    pub fn stories_by_user(&self, user_id: &str) -> Vec<Story> {
        let mut out: Vec<Story> = self
            .stories
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.value().clone())
            .collect();
        out.sort_by_key(|s| s.created_at);
        out
    }

    // ------------------------------------------------------------------
    // Image analyses
    // ------------------------------------------------------------------

    pub fn create_image_analysis(&self, new: NewImageAnalysis) -> ImageAnalysis {
        let analysis = ImageAnalysis {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            image_url: new.image_url,
            description: new.description,
            marketing_copy: new.marketing_copy,
            created_at: Utc::now(),
        };
        self.image_analyses
            .insert(analysis.id.clone(), analysis.clone());
        self.touch_analytics(&analysis.user_id, |a| a.images_analyzed += 1);
        analysis
    }

    pub fn image_analyses_by_user(&self, user_id: &str) -> Vec<ImageAnalysis> {
        let mut out: Vec<ImageAnalysis> = self
            .image_analyses
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.value().clone())
            .collect();
        out.sort_by_key(|a| a.created_at);
        out
    }

    // ------------------------------------------------------------------
    // Social posts
    // ------------------------------------------------------------------

    pub fn create_social_post(&self, new: NewSocialPost) -> SocialPost {
        let post = SocialPost {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            platform: new.platform,
            content: new.content,
            hashtags: new.hashtags,
            caption: new.caption,
            created_at: Utc::now(),
        };
        self.social_posts.insert(post.id.clone(), post.clone());
        self.touch_analytics(&post.user_id, |a| a.social_posts += 1);
        post
    }

    pub fn social_posts_by_user(&self, user_id: &str) -> Vec<SocialPost> {
        let mut out: Vec<SocialPost> = self
            .social_posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.value().clone())
            .collect();
        out.sort_by_key(|p| p.created_at);
        out
    }

    // ------------------------------------------------------------------
    // Product listings (not counted in analytics)
    // ------------------------------------------------------------------

    pub fn create_product_listing(&self, new: NewProductListing) -> ProductListing {
        let listing = ProductListing {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            product_name: new.product_name,
            platform: new.platform,
            optimized_title: new.optimized_title,
            description: new.description,
            keywords: new.keywords,
            created_at: Utc::now(),
        };
        self.product_listings
            .insert(listing.id.clone(), listing.clone());
        listing
    }

    pub fn product_listings_by_user(&self, user_id: &str) -> Vec<ProductListing> {
        let mut out: Vec<ProductListing> = self
            .product_listings
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| l.value().clone())
            .collect();
        out.sort_by_key(|l| l.created_at);
        out
    }

    // ------------------------------------------------------------------
    // Heritage stories (not counted in analytics)
    // ------------------------------------------------------------------

    pub fn create_heritage_story(&self, new: NewHeritageStory) -> HeritageStory {
        let story = HeritageStory {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            technique: new.technique,
            cultural_context: new.cultural_context,
            story: new.story,
            created_at: Utc::now(),
        };
        self.heritage_stories.insert(story.id.clone(), story.clone());
        story
    }

    pub fn heritage_stories_by_user(&self, user_id: &str) -> Vec<HeritageStory> {
        let mut out: Vec<HeritageStory> = self
            .heritage_stories
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.value().clone())
            .collect();
        out.sort_by_key(|s| s.created_at);
        out
    }

    // ------------------------------------------------------------------
    // Portfolios (not counted in analytics)
    // ------------------------------------------------------------------

    pub fn create_portfolio(&self, new: NewPortfolio) -> Portfolio {
        let portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            artist_statement: new.artist_statement,
            description: new.description,
            tags: new.tags,
            is_public: new.is_public,
            created_at: Utc::now(),
        };
        self.portfolios
            .insert(portfolio.id.clone(), portfolio.clone());
        portfolio
    }

    pub fn portfolios_by_user(&self, user_id: &str) -> Vec<Portfolio> {
        let mut out: Vec<Portfolio> = self
            .portfolios
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.value().clone())
            .collect();
        out.sort_by_key(|p| p.created_at);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user_seeded() {
        let storage = StudioStorage::new();
        let user = storage.get_user(DEMO_USER_ID).expect("demo user seeded");
        assert_eq!(user.username, "maria");
        assert_eq!(user.craft_type, "Pottery");

        let analytics = storage.get_analytics(DEMO_USER_ID).expect("demo analytics seeded");
        assert_eq!(analytics.stories_generated, 24);
        assert_eq!(analytics.images_analyzed, 156);
        assert_eq!(analytics.social_posts, 48);
        assert_eq!(analytics.revenue_growth, 34);
    }

    #[test]
    fn test_story_bumps_counter_once() {
        let storage = StudioStorage::new();
        let before = storage.get_analytics(DEMO_USER_ID).unwrap();

        storage.create_story(NewStory {
            user_id: DEMO_USER_ID.to_string(),
            title: "The Kiln at Dawn".to_string(),
            content: "...".to_string(),
            craft_type: "Pottery".to_string(),
            focus: Some("tradition".to_string()),
        });

        let after = storage.get_analytics(DEMO_USER_ID).unwrap();
        assert_eq!(after.stories_generated, before.stories_generated + 1);
        assert_eq!(after.images_analyzed, before.images_analyzed);
        assert_eq!(after.social_posts, before.social_posts);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_uncounted_creations_leave_counters() {
        let storage = StudioStorage::new();
        let before = storage.get_analytics(DEMO_USER_ID).unwrap();

        storage.create_product_listing(NewProductListing {
            user_id: DEMO_USER_ID.to_string(),
            product_name: "Glazed vase".to_string(),
            platform: "Etsy".to_string(),
            optimized_title: "Hand-Thrown Glazed Vase".to_string(),
            description: "...".to_string(),
            keywords: vec!["pottery".to_string()],
        });
        storage.create_heritage_story(NewHeritageStory {
            user_id: DEMO_USER_ID.to_string(),
            technique: "Raku".to_string(),
            cultural_context: "Japanese tea ceremony".to_string(),
            story: "...".to_string(),
        });
        storage.create_portfolio(NewPortfolio {
            user_id: DEMO_USER_ID.to_string(),
            title: "Earth and Fire".to_string(),
            artist_statement: "...".to_string(),
            description: "...".to_string(),
            tags: vec![],
            is_public: false,
        });

        let after = storage.get_analytics(DEMO_USER_ID).unwrap();
        assert_eq!(after.stories_generated, before.stories_generated);
        assert_eq!(after.images_analyzed, before.images_analyzed);
        assert_eq!(after.social_posts, before.social_posts);
    }

    #[test]
    fn test_lists_filter_by_user() {
        let storage = StudioStorage::new();
        let other = storage.create_user(NewUser {
            username: "kenji".to_string(),
            name: "Kenji".to_string(),
            craft_type: "Woodworking".to_string(),
            email: "kenji@craftai.com".to_string(),
            profile_image: None,
        });

        storage.create_story(NewStory {
            user_id: DEMO_USER_ID.to_string(),
            title: "Maria's story".to_string(),
            content: "...".to_string(),
            craft_type: "Pottery".to_string(),
            focus: None,
        });
        storage.create_story(NewStory {
            user_id: other.id.clone(),
            title: "Kenji's story".to_string(),
            content: "...".to_string(),
            craft_type: "Woodworking".to_string(),
            focus: None,
        });

        let maria = storage.stories_by_user(DEMO_USER_ID);
        assert_eq!(maria.len(), 1);
        assert_eq!(maria[0].title, "Maria's story");

        let kenji = storage.stories_by_user(&other.id);
        assert_eq!(kenji.len(), 1);
        assert_eq!(kenji[0].user_id, other.id);

        // Fresh accounts start from zero
        let kenji_analytics = storage.get_analytics(&other.id).unwrap();
        assert_eq!(kenji_analytics.stories_generated, 1);
        assert_eq!(kenji_analytics.images_analyzed, 0);
    }

    #[test]
    fn test_lists_ordered_by_creation() {
        let storage = StudioStorage::new();
        for i in 0..3 {
            storage.create_story(NewStory {
                user_id: DEMO_USER_ID.to_string(),
                title: format!("story-{i}"),
                content: "...".to_string(),
                craft_type: "Pottery".to_string(),
                focus: None,
            });
        }

        let stories = storage.stories_by_user(DEMO_USER_ID);
        assert_eq!(stories.len(), 3);
        assert!(stories.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        assert_eq!(stories[0].title, "story-0");
        assert_eq!(stories[2].title, "story-2");
    }
}
