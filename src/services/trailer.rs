//! Trailer lookup and picking.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Video,
    services::providers::CatalogProvider,
};

/// Videos must be hosted here to be playable in the embedded player
const PLAYABLE_SITE: &str = "YouTube";
/// The catalog's kind tag for official trailers
const TRAILER_TYPE: &str = "Trailer";

/// Fetches a movie's videos and picks the best trailer, if any
pub async fn find_trailer(
    provider: Arc<dyn CatalogProvider>,
    movie_id: u64,
) -> AppResult<Option<Video>> {
    let videos = provider.movie_videos(movie_id).await?;
    let trailer = pick_trailer(videos);

    if trailer.is_none() {
        tracing::info!(movie_id, "No playable trailer found");
    }

    Ok(trailer)
}

/// Picks the most suitable video: an official trailer on the playable site
/// when one exists, otherwise the first playable video of any kind, in the
/// catalog's order. Videos hosted elsewhere are never considered.
pub fn pick_trailer(videos: Vec<Video>) -> Option<Video> {
    let mut playable: Vec<Video> = videos
        .into_iter()
        .filter(|video| video.site == PLAYABLE_SITE)
        .collect();

    match playable
        .iter()
        .position(|video| video.video_type == TRAILER_TYPE)
    {
        Some(index) => Some(playable.remove(index)),
        None => playable.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(key: &str, site: &str, video_type: &str) -> Video {
        Video {
            id: format!("id-{}", key),
            key: key.to_string(),
            name: format!("{} video", video_type),
            site: site.to_string(),
            video_type: video_type.to_string(),
        }
    }

    #[test]
    fn test_prefers_official_trailer() {
        let videos = vec![
            video("a", "YouTube", "Teaser"),
            video("b", "YouTube", "Clip"),
            video("c", "YouTube", "Trailer"),
        ];

        let trailer = pick_trailer(videos).unwrap();
        assert_eq!(trailer.key, "c");
        assert_eq!(trailer.video_type, "Trailer");
    }

    #[test]
    fn test_falls_back_to_first_playable_video() {
        let videos = vec![
            video("a", "YouTube", "Teaser"),
            video("b", "YouTube", "Featurette"),
        ];

        let trailer = pick_trailer(videos).unwrap();
        assert_eq!(trailer.key, "a");
    }

    #[test]
    fn test_ignores_videos_hosted_elsewhere() {
        // A Vimeo trailer must lose to a playable teaser
        let videos = vec![
            video("a", "Vimeo", "Trailer"),
            video("b", "YouTube", "Teaser"),
        ];

        let trailer = pick_trailer(videos).unwrap();
        assert_eq!(trailer.key, "b");
    }

    #[test]
    fn test_no_playable_videos_is_none() {
        let videos = vec![video("a", "Vimeo", "Trailer")];
        assert_eq!(pick_trailer(videos), None);
        assert_eq!(pick_trailer(Vec::new()), None);
    }

    #[test]
    fn test_takes_first_of_several_trailers() {
        let videos = vec![
            video("a", "YouTube", "Trailer"),
            video("b", "YouTube", "Trailer"),
        ];

        let trailer = pick_trailer(videos).unwrap();
        assert_eq!(trailer.key, "a");
    }
}
